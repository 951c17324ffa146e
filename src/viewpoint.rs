//! Viewpoint Structures
//!
//! A viewpoint is what one character sees of one scene: the description text,
//! attached widgets and the actions grouped by where the client shows them.

use serde::{Deserialize, Serialize};

use crate::scene::{Scene, SceneTemplate};

// ============================================================================
// Actions
// ============================================================================

/// A navigable transition to another scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub destination_scene_id: String,
}

impl Action {
    pub fn new(destination_scene_id: &str) -> Self {
        Self {
            destination_scene_id: destination_scene_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionGroupId {
    /// Rendered by the client as the scene's menu
    Default,
    /// Addressable by the client but never listed in a menu
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionGroup {
    pub id: ActionGroupId,
    pub actions: Vec<Action>,
}

impl ActionGroup {
    pub fn new(id: ActionGroupId) -> Self {
        Self {
            id,
            actions: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.id != ActionGroupId::Hidden
    }
}

// ============================================================================
// Forms
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormElementType {
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormElementOptions {
    #[default]
    None,
    Disabled,
}

/// One selectable value of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormElement {
    /// Form field this element populates
    pub parameter: String,
    pub element_type: FormElementType,
    pub label: String,
    pub value: String,
    pub options: FormElementOptions,
}

impl FormElement {
    pub fn button(parameter: &str, label: &str, value: &str, options: FormElementOptions) -> Self {
        Self {
            parameter: parameter.to_string(),
            element_type: FormElementType::Button,
            label: label.to_string(),
            value: value.to_string(),
            options,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.options != FormElementOptions::Disabled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub elements: Vec<FormElement>,
    /// Taken when the form is submitted
    pub action: Action,
}

impl Form {
    pub fn new(elements: Vec<FormElement>, action: Action) -> Self {
        Self { elements, action }
    }
}

/// Structured widget attached to a viewpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Attachment {
    Form(Form),
}

// ============================================================================
// Viewpoint
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewpoint {
    /// Character ID this viewpoint belongs to
    pub owner: i64,
    pub scene_id: String,
    pub template: SceneTemplate,
    pub title: String,
    pub description: String,
    pub attachments: Vec<Attachment>,
    pub action_groups: Vec<ActionGroup>,
}

impl Viewpoint {
    /// Fresh viewpoint of `scene` for character `owner`
    pub fn from_scene(scene: &Scene, owner: i64) -> Self {
        Self {
            owner,
            scene_id: scene.id.clone(),
            template: scene.template,
            title: scene.title.clone(),
            description: scene.description.clone(),
            attachments: Vec::new(),
            action_groups: Vec::new(),
        }
    }

    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    pub fn forms(&self) -> impl Iterator<Item = &Form> {
        self.attachments.iter().map(|a| match a {
            Attachment::Form(form) => form,
        })
    }

    /// Append an action to a group, creating the group if needed
    pub fn add_action_to_group(&mut self, action: Action, group_id: ActionGroupId) {
        match self.action_groups.iter_mut().find(|g| g.id == group_id) {
            Some(group) => group.actions.push(action),
            None => {
                let mut group = ActionGroup::new(group_id);
                group.actions.push(action);
                self.action_groups.push(group);
            }
        }
    }

    pub fn group(&self, group_id: ActionGroupId) -> Option<&ActionGroup> {
        self.action_groups.iter().find(|g| g.id == group_id)
    }

    /// Actions of a group, empty if the group doesn't exist
    pub fn actions_in(&self, group_id: ActionGroupId) -> &[Action] {
        self.group(group_id).map(|g| g.actions.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_are_grouped_in_insertion_order() {
        let scene = Scene::new("shop", SceneTemplate::WeaponShop, "Shop");
        let mut viewpoint = Viewpoint::from_scene(&scene, 7);

        viewpoint.add_action_to_group(Action::new("buy"), ActionGroupId::Hidden);
        viewpoint.add_action_to_group(Action::new("village"), ActionGroupId::Default);
        viewpoint.add_action_to_group(Action::new("forest"), ActionGroupId::Default);

        assert_eq!(viewpoint.action_groups.len(), 2);
        assert_eq!(viewpoint.action_groups[0].id, ActionGroupId::Hidden);
        assert!(!viewpoint.action_groups[0].is_visible());

        let menu: Vec<_> = viewpoint
            .actions_in(ActionGroupId::Default)
            .iter()
            .map(|a| a.destination_scene_id.as_str())
            .collect();
        assert_eq!(menu, vec!["village", "forest"]);
        assert_eq!(viewpoint.actions_in(ActionGroupId::Hidden), &[Action::new("buy")]);
    }

    #[test]
    fn test_attachment_json_shape() {
        let form = Form::new(
            vec![FormElement::button("choice", "Club", "club", FormElementOptions::Disabled)],
            Action::new("buy"),
        );
        let json = serde_json::to_value(Attachment::Form(form)).unwrap();

        assert_eq!(json["type"], "form");
        assert_eq!(json["elements"][0]["element_type"], "button");
        assert_eq!(json["elements"][0]["options"], "disabled");
        assert_eq!(json["action"]["destination_scene_id"], "buy");
    }
}
