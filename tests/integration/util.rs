use std::{ffi::OsString, path::Path, process::Command};

const SHOPLIST_EXE_PATH: &str = env!("CARGO_BIN_EXE_shoplist");

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns the [`Command`] of a binary invocation of shoplist.
pub fn shoplist_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(SHOPLIST_EXE_PATH);
    cmd.env("NO_COLOR", "1");

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" {
            // This is the config file; make sure we set it to absolute path!
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}
