//! Context records parsed from `kubectl config get-contexts` output

/// Marker kubectl prints in front of the active context
pub const ACTIVE_MARKER: char = '*';

/// One context as listed by kubectl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    /// Default namespace, empty when the column is absent
    pub namespace: String,
    /// Whether this is the currently active context
    pub selected: bool,
}

/// Parse a full `get-contexts --no-headers` listing, skipping blank lines
pub fn parse_contexts(output: &str) -> Vec<Context> {
    output
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Parse one listing line positionally: `[*] name cluster authinfo [namespace]`
///
/// Lines with missing columns still yield a record; nothing here fails.
pub fn parse_line(line: &str) -> Context {
    let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");

    let (selected, rest) = match normalized.strip_prefix(ACTIVE_MARKER) {
        Some(rest) => (true, rest.trim_start_matches(ACTIVE_MARKER).trim()),
        None => (false, normalized.as_str()),
    };

    let fields: Vec<&str> = rest.split(' ').collect();
    let namespace = if fields.len() >= 4 {
        fields[3].to_string()
    } else {
        String::new()
    };

    Context {
        name: fields.first().copied().unwrap_or_default().to_string(),
        namespace,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_active_line_with_namespace() {
        let ctx = parse_line("*  ctx-a   cluster-a   user-a   ns-a  ");
        assert_eq!(
            ctx,
            Context {
                name: "ctx-a".to_string(),
                namespace: "ns-a".to_string(),
                selected: true,
            }
        );
    }

    #[test]
    fn test_parse_line_without_namespace() {
        let ctx = parse_line("ctx-b cluster-b user-b");
        assert_eq!(ctx.name, "ctx-b");
        assert_eq!(ctx.namespace, "");
        assert!(!ctx.selected);
    }

    #[test]
    fn test_parse_line_collapses_tabs_and_spaces() {
        let ctx = parse_line("\tdev\t\tdev-cluster   dev-user \t default\r");
        assert_eq!(ctx.name, "dev");
        assert_eq!(ctx.namespace, "default");
        assert!(!ctx.selected);
    }

    #[test]
    fn test_parse_marker_without_space() {
        let ctx = parse_line("*prod prod-cluster prod-user kube-system");
        assert!(ctx.selected);
        assert_eq!(ctx.name, "prod");
        assert_eq!(ctx.namespace, "kube-system");
    }

    #[test]
    fn test_parse_malformed_lines_are_best_effort() {
        let ctx = parse_line("lonely");
        assert_eq!(ctx.name, "lonely");
        assert_eq!(ctx.namespace, "");

        let ctx = parse_line("*");
        assert!(ctx.selected);
        assert_eq!(ctx.name, "");
        assert_eq!(ctx.namespace, "");
    }

    #[test]
    fn test_parse_keeps_marker_inside_name() {
        let ctx = parse_line("team*a cluster user");
        assert!(!ctx.selected);
        assert_eq!(ctx.name, "team*a");
    }

    #[test]
    fn test_parse_contexts_skips_blank_lines_and_keeps_order() {
        let output = "\
          ctx-b   cluster-b   user-b
*         ctx-a   cluster-a   user-a   ns-a

          ctx-c   cluster-c   user-c   ns-c

";
        let contexts = parse_contexts(output);
        let names: Vec<&str> = contexts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ctx-b", "ctx-a", "ctx-c"]);
        assert!(contexts[1].selected);
        assert_eq!(contexts[2].namespace, "ns-c");
    }

    #[test]
    fn test_parse_contexts_empty_output() {
        assert!(parse_contexts("").is_empty());
        assert!(parse_contexts("\n\n").is_empty());
    }
}
