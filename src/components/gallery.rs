use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::components::Component;
use crate::config::{NftList, NftRecord};
use crate::dom;
use crate::errors::{Error, Result};

/// Selector of the container the cards are appended into.
pub const CONTAINER_SELECTOR: &str = ".nft-container";

/// The static preview grid. Renders one card per record at mount time and
/// never changes afterwards, so it ignores every action.
pub struct Gallery {
    records: NftList,
}

impl Gallery {
    pub fn new(records: NftList) -> Self {
        Self { records }
    }
}

impl Component for Gallery {
    fn mount(&mut self, document: &Document) -> Result<()> {
        let container = dom::query_selector(document, CONTAINER_SELECTOR)?;
        render_into(document, &container, &self.records)
    }
}

/// Appends one card per record, in record order: a block holding the image
/// and a title line. An empty slice appends nothing.
pub fn render_into(document: &Document, container: &Element, records: &[NftRecord]) -> Result<()> {
    for record in records {
        let block = dom::create_element(document, "div")?;
        block.set_class_name("nft-block");

        let image: HtmlImageElement = dom::create_element(document, "img")?
            .dyn_into()
            .map_err(|_| Error::Dom(String::from("created img node is not an image element")))?;
        image.set_src(&record.image);
        block
            .append_child(&image)
            .map_err(|e| Error::js("appending gallery image", e))?;

        let title = dom::create_element(document, "div")?;
        title.set_class_name("nft-title");
        title.set_text_content(Some(&record.title));
        block
            .append_child(&title)
            .map_err(|e| Error::js("appending gallery title", e))?;

        container
            .append_child(&block)
            .map_err(|e| Error::js("appending gallery card", e))?;
    }

    Ok(())
}
