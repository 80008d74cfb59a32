pub type MockClosure<I, R> = Box<dyn Fn(I) -> R + Send + Sync>;

/// A replaceable implementation of one binding function. A mock either always runs the same
/// closure, or runs a list of closures in turn, starting over after the last one.
pub struct MockMethod<I, R> {
    closures: Vec<MockClosure<I, R>>,
    call_count: usize,
}

impl<I, R> Default for MockMethod<I, R> {
    fn default() -> Self {
        Self::new_unimplemented()
    }
}

impl<I, R> MockMethod<I, R> {
    pub fn new_unimplemented() -> Self {
        Self::new_fixed(Box::new(|_| unimplemented!()))
    }

    pub fn new_default() -> Self
    where
        R: Default,
    {
        Self::new_fixed(Box::new(|_| R::default()))
    }

    pub fn new_fixed(closure: MockClosure<I, R>) -> Self {
        Self::new_sequence(vec![closure])
    }

    pub fn new_sequence(closures: Vec<MockClosure<I, R>>) -> Self {
        assert!(!closures.is_empty(), "A mock needs at least one closure");
        Self {
            closures,
            call_count: 0,
        }
    }

    pub fn call(&mut self, args: I) -> R {
        let index = self.call_count % self.closures.len();
        self.call_count += 1;
        (self.closures[index])(args)
    }

    pub fn is_called(&self) -> bool {
        self.call_count > 0
    }

    pub fn call_count(&self) -> usize {
        self.call_count
    }
}
