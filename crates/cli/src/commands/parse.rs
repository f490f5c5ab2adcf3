use typex_core::TypeCodec;

pub fn run(codec: &TypeCodec, expr: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ty = codec.parse(expr)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&ty)?);
    } else {
        println!("{}", codec.generate(&ty));
    }
    Ok(())
}
