//! Route modules for Ezhuthu Server

pub mod health;
pub mod pages;
pub mod upload;
