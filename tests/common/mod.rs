//! In-memory stand-in for a browser tab showing the search flow.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use image::{ImageFormat, RgbImage};
use meli_report::{Automation, Error, Locator, Result, MERCADO_LIBRE};

#[derive(Debug, Clone)]
pub enum FakeElement {
    Node(Locator),
    Product(usize),
}

#[derive(Debug, Clone)]
pub struct FakeProduct {
    pub name: Option<&'static str>,
    pub price: Option<&'static str>,
}

impl FakeProduct {
    pub fn complete(name: &'static str, price: &'static str) -> Self {
        Self {
            name: Some(name),
            price: Some(price),
        }
    }

    pub fn without_price(name: &'static str) -> Self {
        Self {
            name: Some(name),
            price: None,
        }
    }
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

pub struct FakeSession {
    missing: Vec<Locator>,
    unclickable: Vec<Locator>,
    products: Vec<FakeProduct>,
    corrupt_shots: Vec<usize>,
    shots: AtomicUsize,
    focused: Mutex<Option<Locator>>,
    pub actions: Arc<Mutex<Vec<String>>>,
    pub closes: Arc<AtomicUsize>,
}

impl FakeSession {
    pub fn with_products(products: Vec<FakeProduct>) -> Self {
        Self {
            missing: Vec::new(),
            unclickable: Vec::new(),
            products,
            corrupt_shots: Vec::new(),
            shots: AtomicUsize::new(0),
            focused: Mutex::new(None),
            actions: Arc::new(Mutex::new(Vec::new())),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Seven complete listings.
    pub fn full() -> Self {
        Self::with_products(
            (0..7)
                .map(|i| FakeProduct::complete(NAMES[i], PRICES[i]))
                .collect(),
        )
    }

    /// The element never shows up.
    pub fn missing(mut self, locator: Locator) -> Self {
        self.missing.push(locator);
        self
    }

    /// The element shows up but never becomes clickable.
    pub fn unclickable(mut self, locator: Locator) -> Self {
        self.unclickable.push(locator);
        self
    }

    /// The `n`th screenshot (0-based) returns bytes that are not an image.
    pub fn corrupt_screenshot(mut self, n: usize) -> Self {
        self.corrupt_shots.push(n);
        self
    }

    fn record(&self, action: String) {
        self.actions.lock().unwrap().push(action);
    }

    fn locator_of(element: &FakeElement) -> String {
        match element {
            FakeElement::Node(l) => l.to_string(),
            FakeElement::Product(i) => format!("product#{i}"),
        }
    }

    /// Key events only reach the element that was last clicked.
    fn ensure_focused(&self, element: &FakeElement) -> Result<()> {
        let focused = *self.focused.lock().unwrap();
        match element {
            FakeElement::Node(l) if focused == Some(*l) => Ok(()),
            _ => Err(Error::ElementNotFound(format!(
                "{} does not have focus",
                Self::locator_of(element)
            ))),
        }
    }

    fn product(&self, element: &FakeElement) -> Result<&FakeProduct> {
        match element {
            FakeElement::Product(i) => self
                .products
                .get(*i)
                .ok_or_else(|| Error::ElementNotFound(format!("product#{i}"))),
            FakeElement::Node(l) => Err(Error::ElementNotFound(l.to_string())),
        }
    }
}

pub const NAMES: [&str; 7] = [
    "PlayStation 5 Pro 2TB",
    "PlayStation 5 Slim Digital",
    "PlayStation 5 Slim 1TB",
    "PlayStation 5 Edición Spider-Man",
    "PlayStation 5 Estándar",
    "PlayStation 5 Reacondicionado",
    "PlayStation 5 Usado",
];

pub const PRICES: [&str; 7] = [
    "18,999", "14,499", "12,999", "11,800", "10,500", "9,999", "8,750",
];

#[async_trait]
impl Automation for FakeSession {
    type Element = FakeElement;

    async fn goto(&self, url: &str) -> Result<()> {
        self.record(format!("goto {url}"));
        Ok(())
    }

    async fn find(&self, locator: &Locator) -> Result<FakeElement> {
        if self.missing.contains(locator) {
            return Err(Error::ElementNotFound(locator.to_string()));
        }
        if *locator == MERCADO_LIBRE.result_item {
            return if self.products.is_empty() {
                Err(Error::ElementNotFound(locator.to_string()))
            } else {
                Ok(FakeElement::Product(0))
            };
        }
        Ok(FakeElement::Node(*locator))
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<FakeElement>> {
        if *locator == MERCADO_LIBRE.result_item {
            return Ok((0..self.products.len()).map(FakeElement::Product).collect());
        }
        Ok(self.find(locator).await.into_iter().collect())
    }

    async fn is_clickable(&self, element: &FakeElement) -> Result<bool> {
        Ok(match element {
            FakeElement::Node(l) => !self.unclickable.contains(l),
            FakeElement::Product(_) => true,
        })
    }

    async fn click(&self, element: &FakeElement) -> Result<()> {
        if let FakeElement::Node(l) = element {
            *self.focused.lock().unwrap() = Some(*l);
        }
        self.record(format!("click {}", Self::locator_of(element)));
        Ok(())
    }

    async fn send_keys(&self, element: &FakeElement, text: &str) -> Result<()> {
        self.ensure_focused(element)?;
        self.record(format!("type {text}"));
        Ok(())
    }

    async fn press_key(&self, element: &FakeElement, key: &str) -> Result<()> {
        self.ensure_focused(element)?;
        self.record(format!("key {key}"));
        Ok(())
    }

    async fn scroll_into_view(&self, element: &FakeElement) -> Result<()> {
        self.record(format!("scroll {}", Self::locator_of(element)));
        Ok(())
    }

    async fn text(&self, element: &FakeElement) -> Result<String> {
        let product = self.product(element)?;
        Ok(format!(
            "{}\n${}",
            product.name.unwrap_or_default(),
            product.price.unwrap_or_default()
        ))
    }

    async fn child_text(&self, element: &FakeElement, locator: &Locator) -> Result<String> {
        let product = self.product(element)?;
        let value = if *locator == MERCADO_LIBRE.result_price {
            product.price
        } else {
            product.name
        };
        value
            .map(str::to_string)
            .ok_or_else(|| Error::ElementNotFound(locator.to_string()))
    }

    async fn ready_state(&self) -> Result<String> {
        Ok("complete".into())
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        let n = self.shots.fetch_add(1, Ordering::SeqCst);
        if self.corrupt_shots.contains(&n) {
            Ok(b"\x89PNG truncated".to_vec())
        } else {
            Ok(png(32, 18))
        }
    }

    async fn close(&mut self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
