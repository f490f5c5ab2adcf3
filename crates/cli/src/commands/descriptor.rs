use typex_core::{DescriptorConverter, DescriptorError, TypeCodec};

/// Render a field or method descriptor in canonical form.
pub fn describe(codec: &TypeCodec, descriptor: &str) -> Result<String, DescriptorError> {
    if descriptor.starts_with('(') {
        let sig = DescriptorConverter::convert_method(descriptor)?;
        let params: Vec<_> = sig.params.iter().map(|p| codec.generate(p)).collect();
        Ok(format!("({}) -> {}", params.join(", "), codec.generate(&sig.ret)))
    } else {
        let ty = DescriptorConverter::convert_field_descriptor(descriptor)?;
        Ok(codec.generate(&ty))
    }
}

pub fn run(codec: &TypeCodec, descriptor: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", describe(codec, descriptor)?);
    Ok(())
}

pub fn run_erase(codec: &TypeCodec, expr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ty = codec.parse(expr)?;
    println!("{}", DescriptorConverter::erased_descriptor(&ty));
    Ok(())
}
