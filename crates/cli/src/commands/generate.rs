use std::io::Read;
use typex_api::TypeExpr;
use typex_core::TypeCodec;

pub fn run(codec: &TypeCodec, input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    let ty: TypeExpr = serde_json::from_str(&content)?;
    if !ty.is_well_formed() {
        tracing::warn!("Input is not well formed and may not parse back: {}", ty);
    }
    println!("{}", codec.generate(&ty));
    Ok(())
}
