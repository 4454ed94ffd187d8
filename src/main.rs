// Termfolio 可执行入口

fn main() {
    termfolio::run();
}
