// ABOUTME: Helper modules for pantrypal-cli
// ABOUTME: Output formatting and id lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

pub mod display;
pub mod ids;
