//! The main presentation part, `/ppt/presentation.xml`.

use crate::error::Result;
use crate::opc::part::Part;
use crate::oxml::XmlElement;

/// Wrapper over the presentation part's XML.
#[derive(Clone, Copy)]
pub struct PresentationPart<'a> {
    part: &'a dyn Part,
}

impl<'a> PresentationPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// The slide rIds from `p:sldIdLst`, in presentation order.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        self.id_list_rids("sldIdLst", "sldId")
    }

    /// The slide master rIds from `p:sldMasterIdLst`.
    pub fn slide_master_rids(&self) -> Result<Vec<String>> {
        self.id_list_rids("sldMasterIdLst", "sldMasterId")
    }

    fn id_list_rids(&self, list_name: &str, entry_name: &str) -> Result<Vec<String>> {
        let root = XmlElement::parse(self.part.blob())?;
        let mut rids = Vec::new();
        if let Some(id_lst) = root.child(list_name) {
            for id in id_lst.children_named(entry_name) {
                if let Some(rid) = id.attr("r:id") {
                    rids.push(rid.to_string());
                }
            }
        }
        Ok(rids)
    }

    /// The slide width in EMU from `p:sldSz`, `None` when undeclared.
    pub fn slide_width(&self) -> Result<Option<i64>> {
        let root = XmlElement::parse(self.part.blob())?;
        Ok(root.child("sldSz").and_then(|sz| sz.int_attr("cx")))
    }

    /// The slide height in EMU from `p:sldSz`.
    pub fn slide_height(&self) -> Result<Option<i64>> {
        let root = XmlElement::parse(self.part.blob())?;
        Ok(root.child("sldSz").and_then(|sz| sz.int_attr("cy")))
    }

    /// The underlying OPC part.
    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}
