//! 各項目的評分說明（日文原文）

const GAIT: &str = "歩行（評価のポイント）：
評価は「壁に対して平行に歩く」「方向転換」「つぎ足歩行（つま先を踵に合わせて歩く）」の合算で行います。
0：問題なし。つぎ足歩行や方向転換が安定しており、10歩以上の歩行がほぼ問題なく行える（小さな踏み外し1回は許容）。
1：わずかな異常。つぎ足歩行は10歩以上可能だが、通常歩行に若干の乱れがある。
2：明らかな障害。つぎ足歩行が10歩を超えないが、短い距離は歩ける。
3：目立つふらつきがあり、方向転換が不安定だが、常時の支持までは要さない。
4：明瞭な不安定さ。時折壁や支えを利用する。
5：激しい不安定さ。単独歩行には杖や一部介助が必要。
6：適切な介助があれば長距離を歩けるが、歩行補助具や介助が必要。
7：充分な介助を行っても歩行距離が短い。歩行器などを常時要する。
8：介助があっても歩行は困難でほぼ歩行不能。";

const STANCE: &str = "立位（評価のポイント）：
立っているときの安定性や姿勢制御を観察します。
0：安定して立てる。
1：わずかに不安定だが短時間は維持できる。
2：明らかな支持の不安定性があり両下肢の安定が不十分。
3：支持基底面の拡大や軽い支持が必要になる。
4：自立が難しく、継続的な補助が必要。
5：常時明確な介助や歩行補助具が必要。
6：一人では立位保持が困難で、しっかりした介助がないと立てない。";

const SITTING: &str = "座位（評価のポイント）：
椅子に座っている際の姿勢および体幹の安定性を評価します。
0：安定して座れる。
1：わずかな体幹の不安定さがある。
2：座位での姿勢維持が難しく手で支える必要がある。
3：長時間の座位保持が困難で、頻繁に姿勢調整する。
4：座位を安定して保てず、支援が必要。";

const SPEECH: &str = "言語機能（評価のポイント）：
発話の明瞭さ、流暢性、語の取り出しや発音の正確さを観察します。
0：明瞭で流暢に話せる。
1：わずかな不明瞭さがあるが日常会話は可能。
2：理解に努力が必要な場面が増える。
3：不明瞭さが顕著でコミュニケーションに支障が出る。
4：発話が著しく低下し、意思疎通が困難。";

const FINGER_CHASE: &str = "指の追跡運動（評価のポイント）：
目標を注視しつつ指を追う動作の正確さと滑らかさを評価します。
0：滑らかで正確に実行できる。
1：小さなズレや遅れが見られる。
2：明らかな不正確さがあり修正が必要。
3：追跡が不安定で連続動作が難しい。
4：ほとんど実行できない。";

const NOSE_FINGER: &str = "鼻指試験（評価のポイント）：
鼻と指を交互に触る際の精度と速度を評価します。
0：正確かつ安定して実行できる。
1：わずかなずれや速度低下がある。
2：目標への到達精度が低下する。
3：動作が粗雑で不正確になる。
4：ほとんど遂行できない。";

const HAND_MOVEMENTS: &str = "手の回内回外運動（評価のポイント）：
手の回内・回外の反復運動の滑らかさと協調性を評価します。
0：滑らかでリズムよく行える。
1：小さな遅延やぎこちなさがある。
2：リズムの乱れや不正確さが目立つ。
3：反復が途切れやすく連続動作が困難。
4：ほとんど行えない。";

const HEEL_SHIN: &str = "踵膝試験（評価のポイント）：
踵を膝に滑らかに沿わせる動作の正確さと協調を評価します。
0：正確でスムーズに行える。
1：若干の不正確さや遅れがある。
2：動作が明らかに不正確で修正が必要。
3：協調性が低下し一貫性がない。
4：遂行不可または著しい困難。";

/// 未登錄的 id 回傳空字串
pub fn guidance_for(item_id: &str) -> &'static str {
    match item_id {
        "1" => GAIT,
        "2" => STANCE,
        "3" => SITTING,
        "4" => SPEECH,
        "5" => FINGER_CHASE,
        "6" => NOSE_FINGER,
        "7" => HAND_MOVEMENTS,
        "8" => HEEL_SHIN,
        _ => "",
    }
}
