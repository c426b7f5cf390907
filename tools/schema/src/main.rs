fn main() -> std::io::Result<()> {
    let schema = graphql::build_schema();
    println!("{}", schema.sdl());
    Ok(())
}
