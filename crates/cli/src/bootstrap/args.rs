use std::ffi::OsString;

/// Multi-letter flags that are also accepted with a single dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["f2", "vpn"];

/// Rewrites `-f2` and `-vpn` (optionally with `=value`) to their double-dash
/// form so clap does not read `-f2` as `-f 2`.
pub fn expand_single_dash_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter().map(expand_arg).collect()
}

fn expand_arg(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
        return arg;
    };

    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    if SINGLE_DASH_LONG_FLAGS.contains(&name) {
        OsString::from(format!("-{}", text))
    } else {
        arg
    }
}
