// SPDX-License-Identifier: MPL-2.0
pub mod overlay_layer;

pub use overlay_layer::OverlayLayer;
