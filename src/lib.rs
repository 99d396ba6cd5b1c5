// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

pub mod config;
pub mod generator;
pub mod item;
pub mod meta;
pub mod text;
