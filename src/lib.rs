//! # Recipe Galaxy Library
//!
//! Turns a recipe dataset into a 3D "galaxy": TF-IDF features over
//! ingredients and tags, a UMAP projection into three coordinates, and an
//! ontology-based cluster label per recipe. Ships a similarity query and a
//! tag-density report over the fitted map.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod processing;
pub mod search;
pub mod storage;
pub mod ui;
