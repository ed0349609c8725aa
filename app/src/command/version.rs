/// Strategy for displaying version information.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        println!("faultbook {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
