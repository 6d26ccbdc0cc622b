use std::fmt;

use ls8_core::soc::Console;
use mockall::mock;

mock! {
    pub Sink {}
    impl Console for Sink {
        fn print(&mut self, value: u8);
    }
}

// `Console` requires `Debug`, which `mock!` does not provide.
impl fmt::Debug for MockSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockSink").finish_non_exhaustive()
    }
}
