// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styling, grouped by widget kind.

pub mod button;
pub mod container;
