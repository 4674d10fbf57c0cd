// ABOUTME: Command modules for pantrypal-cli
// ABOUTME: Pantry, recipe, suggestion, and settings commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

pub mod pantry;
pub mod recipes;
pub mod settings;
pub mod suggest;
