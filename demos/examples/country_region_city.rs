// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Country → Region → City.
//!
//! Renders three chained selects in one render pass and prints the page fragment. The city is
//! preselected, so the emitted preselection walks back up and selects its region and country
//! first.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_cascade_demos --example country_region_city`

use understory_cascade::{
    Attributes, CascadeField, CascadeHelper, IncludeBlank, ParentRef, Prompt, RenderSession,
    SelectOptions,
};
use understory_relation::index;

struct Place {
    id: u32,
    name: &'static str,
    parent: Option<u32>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let countries = [
        Place { id: 1, name: "Germany", parent: None },
        Place { id: 2, name: "Austria", parent: None },
    ];
    let regions = [
        Place { id: 10, name: "Bavaria", parent: Some(1) },
        Place { id: 11, name: "Saxony", parent: Some(1) },
        Place { id: 20, name: "Tyrol", parent: Some(2) },
    ];
    let cities = [
        Place { id: 100, name: "Munich", parent: Some(10) },
        Place { id: 101, name: "Nuremberg", parent: Some(10) },
        Place { id: 110, name: "Dresden", parent: Some(11) },
        Place { id: 200, name: "Innsbruck", parent: Some(20) },
    ];

    let helper: CascadeHelper = CascadeHelper::default();
    let mut session = RenderSession::new();

    // The root is an ordinary select; only its children cascade.
    let mut page = String::from("<select id=\"address_country_id\" name=\"address[country_id]\">");
    for c in &countries {
        page.push_str(&format!("<option value=\"{}\">{}</option>", c.id, c.name));
    }
    page.push_str("</select>\n");

    let region = helper.render(
        &mut session,
        &CascadeField::new("address", "region_id", ParentRef::composite(["address", "country_id"])),
        &index(&regions, |p| p.id, |p| p.name, |p| p.parent),
        &SelectOptions {
            include_blank: IncludeBlank::Placeholder("(any region)".into()),
            ..SelectOptions::default()
        },
        &Attributes::new(),
    );
    page.push_str(&region.to_html());
    page.push('\n');

    let city = helper.render(
        &mut session,
        &CascadeField::new("address", "city_id", "address_region_id"),
        &index(&cities, |p| p.id, |p| p.name, |p| p.parent),
        &SelectOptions {
            selected: Some("110".into()),
            prompt: Prompt::Default,
            ..SelectOptions::default()
        },
        &Attributes::new(),
    );
    page.push_str(&city.to_html());
    page.push('\n');

    session.finish();
    println!("{page}");
}
