//! MISB item registry and dataset decoders
//!
//! This crate turns raw KLV byte buffers into named, physically scaled
//! telemetry values: item definitions and the sealed registry, the local
//! and universal dataset decoders, and the MISB ST 0601.8 / Basic
//! Universal Metadata Set item catalog.

pub mod item;
pub mod local_set;
pub mod registry;
pub mod uas_datalink;
pub mod universal_set;

pub use item::{ItemCodec, ItemDefinition};
pub use local_set::decode_local_dataset;
pub use registry::{build_registry, Registry, RegistryBuilder};
pub use uas_datalink::{
    default_registry, uas_datalink_items, universal_items, BASIC_UNIVERSAL_METADATA_SET_KEY,
    UAS_DATALINK_LOCAL_SET_KEY,
};
pub use universal_set::decode_universal_dataset;
