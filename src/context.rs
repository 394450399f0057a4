/// The parts of an inbound request the policy looks at.
///
/// `origin` borrows the raw `Origin` header value; `None` means the header
/// was missing or not valid UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(origin: Option<&'a str>) -> Self {
        Self { origin }
    }
}
