//! extract_extradata 码流滤镜集成测试

use lan::bsf::{BitstreamFilter, BsfChain, ExtractExtradataFilter};
use lan::codec::{CodecId, Packet, PacketSideDataType};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 构造典型的 H.264 Annex B 关键帧包 (SPS + PPS + IDR + P)
fn build_h264_keyframe() -> Vec<u8> {
    let mut data = Vec::new();

    // SPS (4字节起始码)
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
    data.extend_from_slice(&[0x67, 0x42, 0x00, 0x1E, 0xAB, 0xCD]);

    // PPS (3字节起始码)
    data.extend_from_slice(&[0x00, 0x00, 0x01]);
    data.extend_from_slice(&[0x68, 0xCE, 0x38, 0x80]);

    // IDR 切片 (4字节起始码)
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
    data.extend_from_slice(&[0x65, 0x88, 0x80, 0x40, 0x00, 0xFF, 0xFE]);

    // P 切片 (3字节起始码)
    data.extend_from_slice(&[0x00, 0x00, 0x01]);
    data.extend_from_slice(&[0x41, 0x9A, 0x01, 0x02, 0x03]);

    data
}

// ============================================================
// H.264 端到端
// ============================================================

#[test]
fn test_h264_关键帧提取流程() {
    init_logger();

    let mut chain = BsfChain::new();
    chain.add_filter(Box::new(
        ExtractExtradataFilter::new(CodecId::H264, false).unwrap(),
    ));

    let mut pkt = Packet::from_data(build_h264_keyframe());
    let original = pkt.data.clone();
    chain.process_packet(&mut pkt).unwrap();

    let extradata = pkt
        .side_data(PacketSideDataType::NewExtradata)
        .expect("关键帧包应提取出 extradata");

    // SPS(6) + PPS(4), 各带 3 字节起始码
    assert_eq!(extradata.len(), 6 + 3 + 4 + 3);
    assert_eq!(
        extradata.as_ref(),
        &[
            0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E, 0xAB, 0xCD, // SPS
            0x00, 0x00, 0x01, 0x68, 0xCE, 0x38, 0x80, // PPS
        ]
    );

    // remove=false, 载荷逐字节不变
    assert_eq!(pkt.data, original);
}

#[test]
fn test_h264_剥离流程() {
    init_logger();

    let mut filter = ExtractExtradataFilter::new(CodecId::H264, true).unwrap();
    let mut pkt = Packet::from_data(build_h264_keyframe());
    filter.filter(&mut pkt).unwrap();

    // 新载荷只含两个切片, 重组为统一的 3 字节起始码格式
    assert_eq!(
        pkt.data.as_ref(),
        &[
            0x00, 0x00, 0x01, 0x65, 0x88, 0x80, 0x40, 0x00, 0xFF, 0xFE, // IDR
            0x00, 0x00, 0x01, 0x41, 0x9A, 0x01, 0x02, 0x03, // P
        ]
    );
    assert!(pkt.side_data(PacketSideDataType::NewExtradata).is_some());
}

// ============================================================
// 多包流: 滤镜调用间无共享状态
// ============================================================

#[test]
fn test_多包流_每包独立处理() {
    init_logger();

    let mut filter = ExtractExtradataFilter::new(CodecId::H264, true).unwrap();

    // 包 1: 关键帧, 含参数集
    let mut keyframe = Packet::from_data(build_h264_keyframe());
    filter.filter(&mut keyframe).unwrap();
    assert!(
        keyframe
            .side_data(PacketSideDataType::NewExtradata)
            .is_some()
    );

    // 包 2: 普通 P 帧, 无参数集, 应原样透传
    let p_frame: Vec<u8> = vec![0x00, 0x00, 0x01, 0x41, 0x9A, 0x11, 0x22];
    let mut pkt = Packet::from_data(p_frame.clone());
    filter.filter(&mut pkt).unwrap();
    assert!(pkt.side_data(PacketSideDataType::NewExtradata).is_none());
    assert_eq!(pkt.data.as_ref(), p_frame.as_slice());

    // 包 3: 再来一个关键帧, 结果与包 1 一致
    let mut keyframe2 = Packet::from_data(build_h264_keyframe());
    filter.filter(&mut keyframe2).unwrap();
    assert_eq!(
        keyframe.side_data(PacketSideDataType::NewExtradata),
        keyframe2.side_data(PacketSideDataType::NewExtradata)
    );
    assert_eq!(keyframe.data, keyframe2.data);
}

// ============================================================
// VC-1 / MPEG-2 端到端
// ============================================================

#[test]
fn test_vc1_序列头剥离流程() {
    init_logger();

    let mut data = Vec::new();
    data.extend_from_slice(&[0x00, 0x00, 0x01, 0x0F]); // 序列头
    data.extend_from_slice(&[0xA1, 0xA2, 0xA3, 0xA4]);
    data.extend_from_slice(&[0x00, 0x00, 0x01, 0x0E]); // 入口点
    data.extend_from_slice(&[0xB1, 0xB2]);
    let header_len = data.len();
    data.extend_from_slice(&[0x00, 0x00, 0x01, 0x0D]); // 帧数据
    data.extend_from_slice(&[0xC1, 0xC2, 0xC3]);

    let mut filter = ExtractExtradataFilter::new(CodecId::Vc1, true).unwrap();
    let mut pkt = Packet::from_data(data.clone());
    filter.filter(&mut pkt).unwrap();

    let extradata = pkt.side_data(PacketSideDataType::NewExtradata).unwrap();
    assert_eq!(extradata.as_ref(), &data[..header_len]);
    // 剥离后载荷从帧起始码开始
    assert_eq!(pkt.data.as_ref(), &data[header_len..]);
    // 前缀 + 新载荷 == 原载荷
    let mut rebuilt = extradata.to_vec();
    rebuilt.extend_from_slice(&pkt.data);
    assert_eq!(rebuilt, data);
}

#[test]
fn test_mpeg2_序列头剥离流程() {
    init_logger();

    let mut data = Vec::new();
    data.extend_from_slice(&[0x00, 0x00, 0x01, 0xB3, 0x16, 0x00, 0xF0]); // 序列头
    data.extend_from_slice(&[0x00, 0x00, 0x01, 0xB5, 0x14]); // 扩展
    let header_len = data.len();
    data.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x00, 0x0F]); // 图像头

    let mut filter = ExtractExtradataFilter::new(CodecId::Mpeg2Video, true).unwrap();
    let mut pkt = Packet::from_data(data.clone());
    filter.filter(&mut pkt).unwrap();

    let extradata = pkt.side_data(PacketSideDataType::NewExtradata).unwrap();
    assert_eq!(extradata.as_ref(), &data[..header_len]);
    assert_eq!(pkt.data.as_ref(), &data[header_len..]);
}

// ============================================================
// 分派失败
// ============================================================

#[test]
fn test_不支持的编解码器_构造失败() {
    assert!(ExtractExtradataFilter::new(CodecId::Av1, false).is_err());
    assert!(ExtractExtradataFilter::new(CodecId::Aac, true).is_err());
    assert!(ExtractExtradataFilter::new(CodecId::None, false).is_err());
}
