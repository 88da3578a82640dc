use web_sys::{window, Document, Element, HtmlElement};

use crate::config::ClientConfig;
use crate::error::{Result, UiError};
use crate::theme::Surface;

/// Class set on a toggle whose last request failed
pub const TOGGLE_ERROR_CLASS: &str = "toggle-error";

/// Get document helper
pub fn get_document() -> Result<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| UiError::Dom("No document".into()))
}

/// Text of the embedded config block, if the page has one
pub fn read_config_block(doc: &Document) -> Option<String> {
    doc.get_element_by_id(ClientConfig::ELEMENT_ID)
        .and_then(|el| el.text_content())
}

/// Mark or clear the failure indicator on a toggle
pub fn set_toggle_error(el: &Element, failed: bool) {
    let classes = el.class_list();
    let _ = if failed {
        classes.add_1(TOGGLE_ERROR_CLASS)
    } else {
        classes.remove_1(TOGGLE_ERROR_CLASS)
    };
}

/// [`Surface`] over the live document
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn body(&self) -> Result<HtmlElement> {
        self.document
            .body()
            .ok_or_else(|| UiError::Dom("Document has no body".into()))
    }
}

impl Surface for DomSurface {
    type Node = Element;

    fn add_body_class(&mut self, class: &str) -> Result<()> {
        self.body()?.class_list().add_1(class)?;
        Ok(())
    }

    fn prepend_container(&mut self, id: &str) -> Result<Element> {
        let container = self.document.create_element("div")?;
        container.set_id(id);
        self.body()?.prepend_with_node_1(&container)?;
        Ok(container)
    }

    fn append_decoration(&mut self, parent: &Element, class: &str, style: &str) -> Result<()> {
        let el = self.document.create_element("div")?;
        el.set_class_name(class);
        el.set_attribute("style", style)?;
        parent.append_child(&el)?;
        Ok(())
    }
}
