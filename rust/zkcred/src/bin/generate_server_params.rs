//
// Copyright 2021 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Prints a fresh issuer key pair, or the public half of one read from stdin.
//!
//! Usage: `generate_server_params [--from-stdin]`

use std::io::Read;

use base64::prelude::{Engine, BASE64_STANDARD};
use zkcred::{ParameterAuthority, ServerSecretParams};

fn main() {
    let _ = env_logger::try_init();

    let authority = ParameterAuthority::new();
    let secret = if std::env::args().any(|arg| arg == "--from-stdin") {
        let mut secret_base64 = String::new();
        std::io::stdin()
            .read_to_string(&mut secret_base64)
            .expect("stdin is readable");
        let bytes = BASE64_STANDARD
            .decode(secret_base64.trim_end())
            .expect("stdin is base64");
        ServerSecretParams::new(&bytes).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1)
        })
    } else {
        authority.generate_fresh()
    };
    let public = authority.derive_public(&secret);

    println!("server_secret: {}", BASE64_STANDARD.encode(secret.serialize()));
    println!("server_public: {}", BASE64_STANDARD.encode(public.serialize()));
}
