use vergen_gitcl::{Emitter, Gitcl};

// Commit id and dirty flag feed `version_string()`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let git = Gitcl::builder().sha(true).dirty(true).build();
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}
