// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod helpers;
mod sqlite_pipeline_test;
mod submit_crawl_test;
mod submit_direct_test;
