use anyhow::Result;
use gradle_task_core::GradleProperty;
use serde::Serialize;

use crate::display::print_properties_table;

#[derive(Serialize)]
struct PropertyInfo {
    key: &'static str,
    default: Option<&'static str>,
    option: Option<&'static str>,
}

pub fn properties_command(json: bool) -> Result<()> {
    if json {
        let properties: Vec<PropertyInfo> = GradleProperty::ALL
            .into_iter()
            .map(|p| PropertyInfo {
                key: p.key(),
                default: p.default_value(),
                option: p.option(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&properties)?);
    } else {
        print_properties_table();
    }
    Ok(())
}
