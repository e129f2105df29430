//! Scan a small Decaf program and print every token.

fn main() {
    let source = "\
class Main {
    void main() {
        int total = 0x2A;
        total += 1;
        callout(\"print\", total);
    }
}
";

    let output = decaf_lex::scan(source, "main.dcf");

    println!("Tokens: {}", output.len());
    for element in &output {
        println!("  {element}");
    }
}
