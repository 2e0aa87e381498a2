/// Zero/successor/predecessor spelling of an integer exponent:
/// `0` is `Zero`, `2` is `Succ<Succ<Zero>>`, `-1` is `Pred<Zero>`.
pub fn peano_type(value: i64) -> String {
    let wrapper = if value < 0 { "Pred" } else { "Succ" };
    let depth = value.unsigned_abs() as usize;

    let mut text = String::with_capacity(depth * (wrapper.len() + 2) + 4);
    for _ in 0..depth {
        text.push_str(wrapper);
        text.push('<');
    }
    text.push_str("Zero");
    for _ in 0..depth {
        text.push('>');
    }
    text
}
