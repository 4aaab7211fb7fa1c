//! Integration tests for building trees from YAML descriptions.

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;
    use trellis::{
        Core, Error,
        description::{self, DeserializationError, Mark},
        error::Result,
        geom::Expanse,
        testing::Harness,
        widgets::{Button, Container, Input, Label},
    };

    const FORM: &str = "\
column:
  id: form
  padding: 10
  children:
    - row:
        id: header
        height: 60
        children:
          - label:
              id: title
              text: Sign in
              fit-content: true
    - input:
        id: user
        hint: user name
    - button:
        id: go
        text: Go
        height: 80
";

    #[test]
    fn unknown_kind_reports_its_position() {
        let mut core = Core::new();
        let mut errors = Vec::new();
        let root = description::from_yaml(
            &mut core,
            "row:\n  children:\n    - foo:\n        text: hi\n",
            &mut errors,
        );
        assert!(root.is_some());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "unknown Widget type");
        assert_eq!(errors[0].mark(), Mark::new(3, 7));
    }

    #[test]
    fn errors_accumulate_across_the_tree() {
        let mut core = Core::new();
        let mut errors = Vec::new();
        description::from_yaml(
            &mut core,
            "column:
  color: mauve
  children:
    - label:
        font-size: huge
    - 12
    - sized-box: [1]
",
            &mut errors,
        );
        let got: Vec<(usize, &str)> = errors
            .iter()
            .map(|e| (e.line, e.message.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (5, "expected a number: huge"),
                (6, "Widget name is not a map"),
                (7, "Expected widget node to be a YAML map"),
                (2, "unknown color: mauve"),
            ]
        );
    }

    #[test]
    fn syntax_errors_stop_the_build() {
        let mut core = Core::new();
        let mut errors = Vec::new();
        let root = description::from_yaml(&mut core, "row: [\n", &mut errors);
        assert!(root.is_none());
        assert_eq!(errors.len(), 1);
        assert!(core.is_empty());
    }

    #[test]
    fn loaded_form_lays_out_and_dispatches() -> Result<()> {
        let mut core = Core::new();
        let root = description::from_yaml_strict(&mut core, FORM)?;
        assert_eq!(core.get(root)?.name(), "column");
        assert!(core.widget::<Container>(root).is_ok());

        let Some(go) = core.find_by_id(root, "go") else {
            panic!("no go");
        };
        assert!(core.widget::<Button>(go).is_ok());
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        core.on_click(go, move |_, _| {
            c.set(c.get() + 1);
            true
        })?;

        let mut h = Harness::with_size(core, root, Expanse::new(600.0, 400.0))?;
        assert_eq!(h.core().get(root)?.size(), Expanse::new(600.0, 400.0));

        let Some(header) = h.app.get_by_id("header") else {
            panic!("no header");
        };
        let Some(user) = h.app.get_by_type::<Input>() else {
            panic!("no user");
        };
        assert_eq!(h.core().get(header)?.size().h, 60.0);
        assert_eq!(h.core().get(user)?.position().y, 70.0);
        assert!(h.render.contains_text("Sign in"));
        assert!(h.render.contains_text("user name"));

        h.click((300.0, 100.0))?;
        assert_eq!(h.app.focused(), Some(user.into()));
        h.type_str("ada")?;
        assert_eq!(h.core().widget::<Input>(user)?.text(), "ada");

        let go_y = h.core().get(go)?.position().y;
        h.click((300.0, go_y + 40.0))?;
        assert_eq!(clicks.get(), 1);
        assert_eq!(h.app.focused(), None);

        let Some(title) = h.app.get_by_id("title") else {
            panic!("no title");
        };
        assert_eq!(h.core().widget::<Label>(title)?.text(), "Sign in");
        Ok(())
    }

    #[test]
    fn strict_loading_returns_the_first_error() {
        let mut core = Core::new();
        let err = description::from_yaml_strict(&mut core, "label:\n  color: 0xZZZZZZ\n");
        assert_eq!(
            err,
            Err(Error::Description(DeserializationError {
                line: 2,
                column: 10,
                message: "unknown color: 0xZZZZZZ".into(),
            }))
        );
        assert!(core.is_empty());
    }
}
