// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thin JSON wrappers over the browser `fetch`. Every call is attempted
//! exactly once: no retries, no timeouts.

use gloo_net::http::{Request, Response};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// `GET` the `url` and parse a 2xx body as JSON.
pub async fn fetch_json<T>(url: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let res = Request::get(url)
        .send()
        .await
        .map_err(|err| Error::transport(url, err))?;

    parse(url, res).await
}

/// `POST` the `payload` as JSON and hand back the raw response. The status
/// code is left for the caller to look at.
pub async fn post<P>(url: &str, payload: &P) -> Result<Response>
where
    P: Serialize + ?Sized,
{
    let body = serde_json::to_string(payload)?;

    info!("POST {url} {body}");

    Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|err| Error::transport(url, err))?
        .send()
        .await
        .map_err(|err| Error::transport(url, err))
}

/// Same as [`post`], but also requires a 2xx status and parses the body.
pub async fn post_json<P, T>(url: &str, payload: &P) -> Result<T>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let res = post(url, payload).await?;

    parse(url, res).await
}

pub(crate) fn check_status(url: &str, res: &Response) -> Result<()> {
    if res.ok() {
        Ok(())
    } else {
        Err(Error::Status {
            url: url.to_owned(),
            status: res.status(),
        })
    }
}

async fn parse<T>(url: &str, res: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    check_status(url, &res)?;

    res.json().await.map_err(|err| match err {
        gloo_net::Error::SerdeError(source) => Error::parse(url, source),
        err => Error::transport(url, err),
    })
}
