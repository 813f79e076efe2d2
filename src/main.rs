//! Browser entrypoint: installs logging, then mounts the hero page.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use neural_hero::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
