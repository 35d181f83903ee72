//
//  community-sdk
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive terminal prompts used by the CLI.

pub mod prompt;

pub use prompt::*;
