use super::field::FieldWidget;

#[derive(Debug)]
pub enum FormNode {
    Loading(String),
    Notice(String),
    Field(FieldWidget),
}

/// Container holding the form's widgets in position order.
#[derive(Debug, Default)]
pub struct FormArea {
    nodes: Vec<FormNode>,
}

impl FormArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_loading(&mut self, text: impl Into<String>) {
        self.nodes = vec![FormNode::Loading(text.into())];
    }

    /// Replace everything in the area with a user-visible notice.
    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.nodes = vec![FormNode::Notice(text.into())];
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn append(&mut self, widget: FieldWidget) {
        self.nodes.push(FormNode::Field(widget));
    }

    pub fn nodes(&self) -> &[FormNode] {
        &self.nodes
    }

    pub fn is_loading(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| matches!(node, FormNode::Loading(_)))
    }

    pub fn notice(&self) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            FormNode::Notice(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn widgets(&self) -> impl Iterator<Item = &FieldWidget> {
        self.nodes.iter().filter_map(|node| match node {
            FormNode::Field(widget) => Some(widget),
            _ => None,
        })
    }

    pub fn widget_count(&self) -> usize {
        self.widgets().count()
    }

    pub fn widget(&self, position: usize) -> Option<&FieldWidget> {
        self.widgets().find(|widget| widget.position() == position)
    }

    pub fn widget_mut(&mut self, position: usize) -> Option<&mut FieldWidget> {
        self.widgets_mut().find(|widget| widget.position() == position)
    }

    pub fn widget_by_label_mut(&mut self, label: &str) -> Option<&mut FieldWidget> {
        self.widgets_mut().find(|widget| widget.label() == label)
    }

    fn widgets_mut(&mut self) -> impl Iterator<Item = &mut FieldWidget> {
        self.nodes.iter_mut().filter_map(|node| match node {
            FormNode::Field(widget) => Some(widget),
            _ => None,
        })
    }
}
