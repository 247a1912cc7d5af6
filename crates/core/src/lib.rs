//! Core types for the agricultural advisory pipeline
//!
//! This crate provides the types shared by every stage of a request:
//! - Language codes
//! - Intents and extracted entities
//! - Retrieved context
//! - Real-time weather/market snapshot with documented defaults
//! - The advisory response and its field overlay

pub mod context;
pub mod entities;
pub mod intent;
pub mod language;
pub mod realtime;
pub mod response;

pub use context::Context;
pub use entities::{Crop, EntitySet, Location, Quantity, Unit};
pub use intent::Intent;
pub use language::LanguageCode;
pub use realtime::{
    CurrentConditions, MarketSnapshot, RealTimeData, WeatherSnapshot, DEFAULT_CHANGE,
    DEFAULT_HUMIDITY, DEFAULT_PRICE, DEFAULT_TEMPERATURE,
};
pub use response::{Response, ResponsePatch, BASE_CONFIDENCE};
