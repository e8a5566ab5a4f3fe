//! Runtime abstraction for the one-shot async work the compass does
//!
//! In the browser futures are handed to the JS event loop. Natively there is
//! no event loop to hand them to, so they run to completion on the calling
//! thread.

use futures::Future;

/// Run a local (non-`Send`) future to completion in the background where the
/// platform allows it, or inline otherwise
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    {
        futures::executor::block_on(future);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn test_native_spawn_runs_inline() {
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();

        spawn_local(async move {
            futures::future::ready(()).await;
            flag.set(true);
        });

        assert!(done.get());
    }
}
