use tracing::debug;

/// Something that can hand a URL to a browser or mail client.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> std::io::Result<()>;
}

/// Opens links with the system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> std::io::Result<()> {
        debug!("opening link with system handler");
        open::that(url)
    }
}

/// Keeps every link instead of opening it.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Vec<String>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links received so far, oldest first.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    pub fn last(&self) -> Option<&str> {
        self.opened.last().map(String::as_str)
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> std::io::Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

impl<O: LinkOpener + ?Sized> LinkOpener for &mut O {
    fn open(&mut self, url: &str) -> std::io::Result<()> {
        (**self).open(url)
    }
}
