use anyhow::Result;

use crate::utils::parse_strand;

pub fn complement_strand(text: &str) -> Result<()> {
    let strand = parse_strand(text)?;
    println!("{}", strand.complement());
    Ok(())
}
