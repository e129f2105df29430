//! Scan defective input and show every error reported in one pass.

fn main() {
    let source = "\
int a = 0x;
char c = 'ab';
string s = \"unclosed";

    let output = decaf_lex::scan(source, "broken.dcf");

    for element in &output {
        if element.is_error() {
            println!("error: {element}");
        } else {
            println!("token: {element}");
        }
    }

    let defects = output.iter().filter(|element| element.is_error()).count();
    println!("\n{defects} defect(s) found in one pass");
}
