use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{CrawlError, Result};
use crate::models::{NO_PRICE, Product};

const PRODUCT_BLOCK: &str = "div.product-inner";
const TITLE_LINK: &str = "a.cd.chp";
const PRICE: &str = "span.price span.money";
const IMAGE: &str = "img";

struct Selectors {
    block: Selector,
    link: Selector,
    price: Selector,
    image: Selector,
}

impl Selectors {
    fn compile() -> Result<Self> {
        Ok(Selectors {
            block: selector(PRODUCT_BLOCK)?,
            link: selector(TITLE_LINK)?,
            price: selector(PRICE)?,
            image: selector(IMAGE)?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CrawlError::Parse(format!("bad selector {css:?}: {e}")))
}

/// Extract every product block on the page, in document order.
///
/// Each field is resolved on its own; a block missing its link, price or
/// image still yields a record with that field set to its fallback.
pub fn parse_products(html: &str, site_origin: &str) -> Result<Vec<Product>> {
    let selectors = Selectors::compile()?;
    let doc = Html::parse_document(html);

    let products: Vec<Product> = doc
        .select(&selectors.block)
        .map(|block| {
            let (name, url) = resolve_link(block.select(&selectors.link).next(), site_origin);
            Product {
                name,
                url,
                price: resolve_price(block.select(&selectors.price).next()),
                image: resolve_image(block.select(&selectors.image).next(), site_origin),
            }
        })
        .collect();

    debug!(count = products.len(), "extracted product blocks");
    Ok(products)
}

pub fn resolve_link(anchor: Option<ElementRef<'_>>, site_origin: &str) -> (String, String) {
    match anchor {
        Some(a) => {
            let url = a
                .value()
                .attr("href")
                .map(|href| format!("{site_origin}{href}"))
                .unwrap_or_default();
            (stripped_text(a), url)
        }
        None => (String::new(), String::new()),
    }
}

pub fn resolve_price(price: Option<ElementRef<'_>>) -> String {
    price
        .map(stripped_text)
        .unwrap_or_else(|| NO_PRICE.to_string())
}

pub fn resolve_image(img: Option<ElementRef<'_>>, site_origin: &str) -> String {
    img.and_then(|img| img.value().attr("src"))
        .map(|src| normalize_image_src(src, site_origin))
        .unwrap_or_default()
}

/// Make a `src` attribute absolute: `//host/x` gets `https:`, `/x` gets the
/// site origin, anything else is returned as-is.
pub fn normalize_image_src(src: &str, site_origin: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else if src.starts_with('/') {
        format!("{site_origin}{src}")
    } else {
        src.to_string()
    }
}

// Every text node trimmed, empty ones dropped, the rest joined with no separator.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://ilot.co";

    const TWO_PRODUCTS: &str = r#"
        <html><body>
          <div class="grid">
            <div class="product-inner">
              <a class="cd chp" href="/products/camisa-lino">
                Camisa <span>Lino</span>
              </a>
              <span class="price"><span class="money"> $129.900 </span></span>
              <img src="//ilot.co/cdn/shop/files/camisa.jpg" alt="Camisa">
            </div>
            <div class="product-inner">
              <a class="cd chp" href="/products/pantalon-cargo">Pantalón Cargo</a>
              <span class="price"><span class="money">$159.900</span></span>
            </div>
          </div>
        </body></html>
    "#;

    fn first_block(html: &str) -> Product {
        parse_products(html, ORIGIN).unwrap().remove(0)
    }

    #[test]
    fn extracts_fixture_with_one_block_missing_image() {
        let products = parse_products(TWO_PRODUCTS, ORIGIN).unwrap();
        assert_eq!(products.len(), 2);

        assert_eq!(
            products[0],
            Product {
                name: "CamisaLino".into(),
                url: "https://ilot.co/products/camisa-lino".into(),
                price: "$129.900".into(),
                image: "https://ilot.co/cdn/shop/files/camisa.jpg".into(),
            }
        );

        assert_eq!(products[1].name, "Pantalón Cargo");
        assert_eq!(products[1].url, "https://ilot.co/products/pantalon-cargo");
        assert_eq!(products[1].price, "$159.900");
        assert_eq!(products[1].image, "");
    }

    #[test]
    fn empty_input_yields_no_products() {
        assert!(parse_products("", ORIGIN).unwrap().is_empty());
        assert!(parse_products("<html><body><p>Nada</p></body></html>", ORIGIN)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn output_length_matches_block_count() {
        let html = r#"<div class="product-inner"></div>"#.repeat(7);
        let products = parse_products(&html, ORIGIN).unwrap();
        assert_eq!(products.len(), 7);
        assert!(products.iter().all(|p| p.name.is_empty() && p.price == NO_PRICE));
    }

    #[test]
    fn missing_anchor_clears_name_and_url_only() {
        let product = first_block(
            r#"<div class="product-inner">
                 <span class="price"><span class="money">$50.000</span></span>
                 <img src="/files/a.jpg">
               </div>"#,
        );
        assert_eq!(product.name, "");
        assert_eq!(product.url, "");
        assert_eq!(product.price, "$50.000");
        assert_eq!(product.image, "https://ilot.co/files/a.jpg");
    }

    #[test]
    fn missing_price_uses_sentinel() {
        let product = first_block(
            r#"<div class="product-inner"><a class="cd chp" href="/products/x">X</a></div>"#,
        );
        assert_eq!(product.price, "Sin precio");
        assert_eq!(product.name, "X");
    }

    #[test]
    fn price_needs_money_inside_price() {
        let product = first_block(
            r#"<div class="product-inner"><span class="money">$1</span></div>"#,
        );
        assert_eq!(product.price, NO_PRICE);
    }

    #[test]
    fn anchor_must_carry_both_classes() {
        let product = first_block(
            r#"<div class="product-inner"><a class="cd" href="/products/x">X</a></div>"#,
        );
        assert_eq!(product.name, "");
        assert_eq!(product.url, "");
    }

    #[test]
    fn anchor_without_href_keeps_name() {
        let product = first_block(r#"<div class="product-inner"><a class="cd chp">Solo</a></div>"#);
        assert_eq!(product.name, "Solo");
        assert_eq!(product.url, "");
    }

    #[test]
    fn image_without_src_is_empty() {
        let product = first_block(r#"<div class="product-inner"><img alt="x"></div>"#);
        assert_eq!(product.image, "");
    }

    #[test]
    fn first_match_wins_per_field() {
        let product = first_block(
            r#"<div class="product-inner">
                 <img src="https://a.cdn/1.jpg"><img src="https://a.cdn/2.jpg">
                 <span class="price"><span class="money">$1</span><span class="money">$2</span></span>
               </div>"#,
        );
        assert_eq!(product.image, "https://a.cdn/1.jpg");
        assert_eq!(product.price, "$1");
    }

    #[test]
    fn normalizes_image_sources() {
        assert_eq!(
            normalize_image_src("//cdn.example.com/a.jpg", ORIGIN),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(normalize_image_src("/files/a.jpg", ORIGIN), "https://ilot.co/files/a.jpg");
        assert_eq!(
            normalize_image_src("https://other.cdn/a.jpg", ORIGIN),
            "https://other.cdn/a.jpg"
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = parse_products(TWO_PRODUCTS, ORIGIN).unwrap();
        let second = parse_products(TWO_PRODUCTS, ORIGIN).unwrap();
        assert_eq!(first, second);
    }
}
