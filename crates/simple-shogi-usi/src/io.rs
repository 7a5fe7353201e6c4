use std::io::{self, Write};

/// USIプロトコルに沿って標準出力へ行を出力するヘルパ。
pub fn usi_println(s: &str) {
    println!("{s}");
    // 出力先が閉じていても応答ループは続ける
    let _ = io::stdout().flush();
}

/// `info string ...` の出力ユーティリティ。
pub fn info_string<S: AsRef<str>>(s: S) {
    usi_println(&format!("info string {}", s.as_ref()));
}
