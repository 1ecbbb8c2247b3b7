// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! PoolManager event scanning
//!
//! - [`definitions`] - the `Initialize` event ABI
//! - [`source`] - the [`ChainLogSource`] seam over an RPC provider
//! - [`scanner`] - chunked log fetching over a block range

pub mod definitions;
pub mod scanner;
pub mod source;

pub use definitions::Initialize;
pub use scanner::EventScanner;
pub use source::ChainLogSource;
