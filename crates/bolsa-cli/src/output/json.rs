use bolsa_core::error::BolsaError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), BolsaError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
