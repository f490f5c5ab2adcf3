use typex_api::TypeExpr;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(TypeExpr);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
