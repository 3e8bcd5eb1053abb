use super::*;

#[test]
fn single_digit_indices_get_a_leading_zero() {
    for i in 0..10u32 {
        assert_eq!(format_label(i, 2), format!("0{i}"));
    }
    assert_eq!(format_label(3, 2), "03");
}

#[test]
fn two_digit_indices_are_unpadded() {
    for i in 10..33u32 {
        assert_eq!(format_label(i, 2), i.to_string());
    }
    assert_eq!(format_label(15, 2), "15");
}

#[test]
fn wider_labels_pad_to_width() {
    assert_eq!(format_label(7, 3), "007");
    assert_eq!(format_label(123, 2), "123");
}

#[test]
fn file_name_embeds_label() {
    assert_eq!(card_file_name("card_{index}.png", "07"), "card_07.png");
    assert_eq!(card_file_name("{index}.png", "32"), "32.png");
}

#[test]
fn job_label_and_file_name_agree() {
    let job = CardJob::new(9, 2, "card_{index}.png");
    assert_eq!(job.index, 9);
    assert_eq!(job.label, "09");
    assert_eq!(job.file_name, "card_09.png");
    assert!(job.file_name.contains(&job.label));
}
