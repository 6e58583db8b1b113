// Service module exports

pub mod calendar;
pub mod notification;
pub mod settings;
pub mod validation;
