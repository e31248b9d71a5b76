//! Content type listing (`qrforge types`).

use anyhow::Result;
use qrforge::ContentType;

/// Print the supported content types and the fields each one consumes.
pub fn handle() -> Result<()> {
    println!("{:<8} fields", "type");
    for ty in ContentType::all() {
        println!("{:<8} {}", ty.name(), ty.field_summary());
    }
    Ok(())
}
