use std::collections::HashMap;

use anyhow::Result;

use crate::dex::Dex;

pub fn builtin_dex_sources() -> HashMap<&'static str, &'static str> {
    HashMap::from([("kanto_sample", include_str!("../content/dex/kanto_sample.yaml"))])
}

/// The bundled sample identity pool.
pub fn builtin_dex() -> Result<Dex> {
    let text = builtin_dex_sources()
        .get("kanto_sample")
        .copied()
        .ok_or_else(|| anyhow::anyhow!("builtin dex 'kanto_sample' not found"))?;
    Dex::from_yaml_str(text)
}
