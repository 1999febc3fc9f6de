// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scorekeeper SDK - shared vocabulary for live match scoring
//!
//! This crate holds the serializable types that collaborators (UI layers,
//! broadcast transports, persistence) exchange with the scoring engine.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No engine logic
//! - No runtime initialization
//! - No environment or configuration loading

pub mod types;

pub use types::*;
