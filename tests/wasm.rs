#![cfg(target_arch = "wasm32")]

//! Browser-side tests, run with `wasm-pack test --headless --firefox`.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc;
use futures::StreamExt;
use js_sys::{Array, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

use nftui::{
    action::Action,
    app::run_connect,
    components::gallery,
    ethereum::Provider,
    App, Config,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Lets the action loop tasks parked on the browser event loop run.
async fn yield_to_browser() {
    for _ in 0..10 {
        let _ = JsFuture::from(Promise::resolve(&JsValue::NULL)).await;
    }
}

/// A fake injected provider whose `request` resolves account requests with
/// the given addresses. Records every requested method and the chain id of
/// any add-chain call.
fn stub_provider(
    accounts: &[&str],
) -> (Provider, Rc<RefCell<Vec<String>>>, Rc<RefCell<Option<String>>>) {
    let methods = Rc::new(RefCell::new(Vec::new()));
    let chain_id = Rc::new(RefCell::new(None));
    let accounts: Vec<String> = accounts.iter().map(ToString::to_string).collect();

    let seen_methods = methods.clone();
    let seen_chain_id = chain_id.clone();
    let request = Closure::<dyn FnMut(JsValue) -> Promise>::new(move |args: JsValue| {
        let method = Reflect::get(&args, &"method".into())
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or_default();
        seen_methods.borrow_mut().push(method.clone());

        match method.as_str() {
            "eth_requestAccounts" => {
                let response = Array::new();
                for account in &accounts {
                    response.push(&JsValue::from_str(account));
                }
                Promise::resolve(&response)
            }
            "wallet_addEthereumChain" => {
                let id = Reflect::get(&args, &"params".into())
                    .ok()
                    .map(|params| Array::from(&params).get(0))
                    .and_then(|chain| Reflect::get(&chain, &"chainId".into()).ok())
                    .and_then(|id| id.as_string());
                *seen_chain_id.borrow_mut() = id;
                Promise::resolve(&JsValue::UNDEFINED)
            }
            _ => Promise::reject(&JsValue::from_str("unexpected method")),
        }
    });

    let object = Object::new();
    Reflect::set(&object, &"request".into(), request.as_ref()).unwrap();
    request.forget();

    (Provider::from_object(object), methods, chain_id)
}

/// A provider whose account request rejects, like a dismissed prompt.
fn rejecting_provider() -> Provider {
    let request = Closure::<dyn FnMut(JsValue) -> Promise>::new(|_args: JsValue| {
        Promise::reject(&JsValue::from_str("User rejected the request."))
    });
    let object = Object::new();
    Reflect::set(&object, &"request".into(), request.as_ref()).unwrap();
    request.forget();
    Provider::from_object(object)
}

/// Replaces `window.alert`, recording each call's message alongside the
/// status element text already on the page when the alert fired.
fn capture_alerts() -> Rc<RefCell<Vec<(String, String)>>> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = calls.clone();
    let hook = Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
        let status = document()
            .get_element_by_id("wallet-status")
            .and_then(|status| status.text_content())
            .unwrap_or_default();
        seen.borrow_mut()
            .push((message.as_string().unwrap_or_default(), status));
    });
    let window = web_sys::window().unwrap();
    Reflect::set(&window, &"alert".into(), hook.as_ref()).unwrap();
    hook.forget();
    calls
}

#[wasm_bindgen_test]
fn test_gallery_renders_one_card_per_record() {
    let document = document();
    let container = document.create_element("div").unwrap();
    let config = Config::new().unwrap();

    gallery::render_into(&document, &container, &config.nfts).unwrap();

    assert_eq!(6, container.child_element_count());

    // Walk the cards in order; each position mirrors its record exactly
    let mut card = container.first_element_child();
    for record in config.nfts.iter() {
        let block = card.unwrap();
        assert_eq!("nft-block", block.class_name());

        let image = block.first_element_child().unwrap();
        assert_eq!("IMG", image.tag_name());
        assert_eq!(Some(record.image.clone()), image.get_attribute("src"));

        let title = image.next_element_sibling().unwrap();
        assert_eq!("nft-title", title.class_name());
        assert_eq!(Some(record.title.clone()), title.text_content());
        assert!(title.next_element_sibling().is_none());

        card = block.next_element_sibling();
    }
    assert!(card.is_none());
}

#[wasm_bindgen_test]
fn test_gallery_renders_nothing_for_empty_list() {
    let document = document();
    let container = document.create_element("div").unwrap();

    gallery::render_into(&document, &container, &[]).unwrap();

    assert_eq!(0, container.child_element_count());
}

#[wasm_bindgen_test]
fn test_detect_returns_none_without_injection() {
    assert!(Provider::detect().is_none());
}

#[wasm_bindgen_test]
async fn test_connect_round_reports_first_account_and_proposes_chain() {
    let (provider, methods, chain_id) = stub_provider(&["0xfirst", "0xsecond"]);
    let (tx, mut rx) = mpsc::unbounded();
    let config = Config::new().unwrap();

    run_connect(Some(provider), config.chain, tx).await;

    assert_eq!(Some(Action::WalletDetected), rx.next().await);
    assert_eq!(
        Some(Action::AccountConnected("0xfirst".to_string())),
        rx.next().await
    );
    assert_eq!(None, rx.next().await);

    assert_eq!(
        vec!["eth_requestAccounts", "wallet_addEthereumChain"],
        *methods.borrow()
    );
    assert_eq!(Some("0x5".to_string()), *chain_id.borrow());
}

#[wasm_bindgen_test]
async fn test_rejected_account_request_stops_the_round() {
    let (tx, mut rx) = mpsc::unbounded();
    let config = Config::new().unwrap();

    run_connect(Some(rejecting_provider()), config.chain, tx).await;

    assert_eq!(Some(Action::WalletDetected), rx.next().await);
    match rx.next().await {
        Some(Action::Error(message)) => {
            assert!(message.contains("account request failed"), "{message}");
        }
        other => panic!("expected an error action, got {other:?}"),
    }
    assert_eq!(None, rx.next().await);
}

#[wasm_bindgen_test]
async fn test_empty_account_list_is_an_error() {
    let (provider, methods, _chain_id) = stub_provider(&[]);
    let (tx, mut rx) = mpsc::unbounded();
    let config = Config::new().unwrap();

    run_connect(Some(provider), config.chain, tx).await;

    assert_eq!(Some(Action::WalletDetected), rx.next().await);
    match rx.next().await {
        Some(Action::Error(message)) => {
            assert!(message.contains("no accounts"), "{message}");
        }
        other => panic!("expected an error action, got {other:?}"),
    }
    assert_eq!(None, rx.next().await);

    // No chain proposal after a failed account request
    assert_eq!(vec!["eth_requestAccounts"], *methods.borrow());
}

#[wasm_bindgen_test]
async fn test_page_without_wallet_reports_missing_and_alerts_once() {
    let document = document();
    let body = document.body().unwrap();
    body.set_inner_html(
        "<main class=\"nft-container\"></main>\
         <button id=\"connect-wallet\"></button>\
         <div id=\"wallet-status\"></div>",
    );
    let alerts = capture_alerts();

    App::new().unwrap().run(&document).unwrap();

    // Mounting rendered the gallery and styled the status element
    let container = document.query_selector(".nft-container").unwrap().unwrap();
    assert_eq!(6, container.child_element_count());
    let status = document.get_element_by_id("wallet-status").unwrap();
    let style = status.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!("pre-wrap", style.get_property_value("white-space").unwrap());

    // No extension in the test browser, so a click reports missing
    let button = document.get_element_by_id("connect-wallet").unwrap();
    button.dyn_ref::<HtmlElement>().unwrap().click();
    yield_to_browser().await;

    assert_eq!(
        Some("Metamask is not installed or enabled.\n".to_string()),
        status.text_content()
    );
    // Exactly one alert, and the status line was on the page when it fired
    let calls = alerts.borrow();
    assert_eq!(1, calls.len());
    let (message, status_at_alert) = &calls[0];
    assert_eq!("Metamask is not installed or enabled.", message.as_str());
    assert_eq!("Metamask is not installed or enabled.\n", status_at_alert.as_str());
}

#[wasm_bindgen_test]
fn test_page_without_container_mounts_nothing() {
    let document = document();
    let body = document.body().unwrap();
    body.set_inner_html(
        "<button id=\"connect-wallet\"></button>\
         <div id=\"wallet-status\"></div>",
    );

    let err = App::new().unwrap().run(&document).unwrap_err();

    assert_eq!("element not found: .nft-container", err.to_string());
    // The gallery is the first mount, so the failure leaves no cards behind
    assert!(document.query_selector(".nft-block").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_page_without_status_element_keeps_rendered_cards() {
    let document = document();
    let body = document.body().unwrap();
    body.set_inner_html(
        "<main class=\"nft-container\"></main>\
         <button id=\"connect-wallet\"></button>",
    );

    let err = App::new().unwrap().run(&document).unwrap_err();

    assert_eq!("element not found: #wallet-status", err.to_string());
    // The gallery mounted before the failure; its cards stay in the page
    let container = document.query_selector(".nft-container").unwrap().unwrap();
    assert_eq!(6, container.child_element_count());
}
