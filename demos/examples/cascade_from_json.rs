// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade from JSON rows and JSON options.
//!
//! Records are read by field name and options are parsed from JSON, the way a host that keeps
//! its form descriptions in configuration would drive the helper. An invalid `include_blank`
//! is reported instead of being ignored.
//!
//! Run:
//! - `cargo run -p understory_cascade_demos --example cascade_from_json`

use serde_json::json;
use understory_cascade::{
    Attributes, CascadeField, CascadeHelper, EmitterConfig, FieldNames, RenderSession,
    ScriptEmitter, SelectOptions,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = EmitterConfig::from_json(r#"{ "namespace": "Chained", "wrap_scripts": false }"#)
        .unwrap_or_default();
    let helper = CascadeHelper::new(ScriptEmitter::new(config));

    let stations = vec![
        json!({ "code": "KGX", "label": "King's Cross", "line": "northern" }),
        json!({ "code": "EUS", "label": "Euston", "line": "northern" }),
        json!({ "code": "PAD", "label": "Paddington", "line": "bakerloo" }),
    ];
    let names = FieldNames {
        value: "code",
        text: "label",
        reference: "line",
    };

    for raw in [
        r#"{ "selected": "EUS", "includeBlank": ["Choose a station", ""] }"#,
        r#"{ "includeBlank": 42 }"#,
    ] {
        let options = match SelectOptions::from_json(raw) {
            Ok(options) => options,
            Err(err) => {
                eprintln!("rejected options {raw}: {err}");
                continue;
            }
        };
        let mut session = RenderSession::new();
        match helper.render_collection(
            &mut session,
            &CascadeField::new("journey", "station", "journey_line"),
            &stations,
            names,
            &options,
            &Attributes::new(),
        ) {
            Ok(out) => println!("{out}"),
            Err(err) => eprintln!("render failed: {err}"),
        }
        session.finish();
    }
}
