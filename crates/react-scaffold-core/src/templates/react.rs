//! File contents for a React component folder

/// Component module (`<Name>.<suffix>.tsx`)
///
/// `controller_module` is the import specifier of the controller hook, when a
/// controller is generated alongside.
pub fn component(name: &str, with_interface: bool, controller_module: Option<&str>) -> String {
    let mut imports = String::from("import React from \"react\";\n");
    if let Some(module) = controller_module {
        imports.push_str(&format!(
            "import {{ use{name}Controller as useController }} from \"{module}\";\n"
        ));
    }
    if with_interface {
        imports.push_str(&format!(
            "import type {{ {name}Props }} from \"./{name}.interface\";\n"
        ));
    }

    let signature = if with_interface {
        format!("React.FC<{name}Props>")
    } else {
        "React.FC".to_string()
    };

    let (controller_setup, hello_line) = match controller_module {
        Some(_) => (
            "  const { actions, state } = useController();\n  console.log({ actions, state });\n"
                .to_string(),
            "<p>Hello, {state.name}</p>".to_string(),
        ),
        None => (String::new(), format!("<p>Hello, {name}</p>")),
    };

    format!(
        "{imports}
export const {name}: {signature} = (_props) => {{
{controller_setup}  return (
    <div>
      {hello_line}
    </div>
  );
}};
"
    )
}

/// Props interface (`<Name>.interface.ts`)
pub fn interface(name: &str) -> String {
    format!("export interface {name}Props {{}}\n")
}

/// Render test importing the component module
pub fn test(name: &str, suffix: &str) -> String {
    format!(
        r#"import React from "react";
import {{ render }} from "@testing-library/react";
import {{ {name} }} from "./{name}.{suffix}";

describe("{name}", () => {{
  it("renders default content", () => {{
    render(React.createElement({name}));
  }});
}});
"#
    )
}

/// Controller hook holding the component's view logic
pub fn controller(name: &str) -> String {
    format!(
        r#"/* -----------------------------------------------------------------------------
 * View logic for {name}
 * -----------------------------------------------------------------------------
 * Keep these functions pure so they stay easy to test. The hook belongs to a
 * single view and is not meant to be shared.
 */

export const use{name}Controller = () => {{
  return {{
    actions: {{}},
    state: {{
      name: "its from controller {name}",
    }},
  }};
}};
"#
    )
}

/// Barrel file re-exporting the component, its props and its controller
pub fn index(
    name: &str,
    suffix: &str,
    with_interface: bool,
    controller_module: Option<&str>,
) -> String {
    let mut lines = vec![format!(
        "export {{ {name} as default, {name} }} from \"./{name}.{suffix}\";"
    )];

    if with_interface {
        lines.push(format!(
            "export type {{ {name}Props }} from \"./{name}.interface\";"
        ));
    }
    if let Some(module) = controller_module {
        lines.push(format!(
            "export {{ use{name}Controller }} from \"{module}\";"
        ));
    }

    lines.join("\n") + "\n"
}
