// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use direct_democracy::{Config, DirectDemocracy, HttpBackend};
use kobold::prelude::*;
use log::info;

fn main() {
    let config = Config::default();

    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    info!("mounting, backend at {:?}", config.base_url);

    let backend = HttpBackend::shared(config);

    kobold::start(view! {
        <div>
            <DirectDemocracy {backend} />
        </div>
    });
}
