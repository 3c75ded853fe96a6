use miette::Result;

fn main() -> Result<()> {
    sandhika::cli::run()?;
    Ok(())
}
