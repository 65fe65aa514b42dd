// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Devtools escape hatch, only compiled with the `debug-hooks` feature.
//!
//! The proposition list registers its reload here when mounted. From the
//! browser console the reload can then be forced with:
//!
//! ```js
//! wasm_bindgen.debug_trigger_reload()
//! ```
//!
//! Nothing in the app ever reads the registration back.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;

thread_local! {
    static RELOAD: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Register the reload action, replacing any earlier registration.
pub fn register_reload<F>(reload: F)
where
    F: Fn() + 'static,
{
    RELOAD.with(|slot| *slot.borrow_mut() = Some(Rc::new(reload)));
}

/// Trigger the registered reload. Returns `false` if nothing is mounted.
#[wasm_bindgen]
pub fn debug_trigger_reload() -> bool {
    // Released before the call, a reload may register itself again
    let reload = RELOAD.with(|slot| slot.borrow().clone());

    match reload {
        Some(reload) => {
            debug!("reload triggered from debug hook");
            reload();
            true
        }
        None => false,
    }
}
